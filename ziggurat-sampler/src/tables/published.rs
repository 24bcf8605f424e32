//! McFarland's published tables for 256 layers.
//!
//! `X` and `Y` are the layer abscissae and kernel values scaled by `2^-63`,
//! ending at the apex. `IPMF` and `MAP` are the alias thresholds and targets
//! over the tail (slot 0) and the overhangs. Slots past the apex carry no
//! mass. [`ModifiedTables::build`](super::ModifiedTables::build) regenerates
//! the same layers from the tail start alone.

#![allow(clippy::unreadable_literal)]

/// Normal layer abscissae.
pub const NORMAL_X: [f64; 254] = [
    3.9421662825398133e-19, 3.720494500411901e-19, 3.582702448062868e-19, 3.480747623654025e-19,
    3.3990177171882136e-19, 3.330377836034014e-19, 3.270943881761755e-19, 3.21835771324951e-19,
    3.171075854184043e-19, 3.1280307407034065e-19, 3.088452065580402e-19, 3.051765062410735e-19,
    3.01752902925846e-19, 2.985398344070532e-19, 2.9550967462801797e-19, 2.9263997988491663e-19,
    2.8991225869977476e-19, 2.873110878022629e-19, 2.8482346327101335e-19, 2.824383153519439e-19,
    2.801461396472703e-19, 2.7793871261807797e-19, 2.758088692141121e-19, 2.737503269830876e-19,
    2.7175754543391047e-19, 2.6982561247538484e-19, 2.6795015188771505e-19, 2.6612724730440033e-19,
    2.6435337927976633e-19, 2.626253728202844e-19, 2.609403533522414e-19, 2.5929570954331e-19,
    2.5768906173214726e-19, 2.561182349771961e-19, 2.545812359339336e-19, 2.530762329237246e-19,
    2.51601538677984e-19, 2.501555953364619e-19, 2.487369613540316e-19, 2.4734430003079206e-19,
    2.4597636942892726e-19, 2.446320134791245e-19, 2.4331015411139206e-19, 2.4200978427132955e-19,
    2.407299617044588e-19, 2.3946980340903347e-19, 2.3822848067252674e-19, 2.37005214619318e-19,
    2.357992722074133e-19, 2.346099626206997e-19, 2.3343663401054455e-19, 2.322786705467384e-19,
    2.3113548974303765e-19, 2.300065400270424e-19, 2.2889129852797606e-19, 2.2778926905921897e-19,
    2.266999802752732e-19, 2.2562298398527416e-19, 2.245578536072726e-19, 2.235041827493391e-19,
    2.2246158390513294e-19, 2.214296872529625e-19, 2.2040813954857555e-19, 2.19396603102976e-19,
    2.183947548374962e-19, 2.1740228540916853e-19, 2.164188984001652e-19, 2.1544430956570613e-19,
    2.1447824613540345e-19, 2.1352044616350571e-19, 2.1257065792395107e-19, 2.1162863934653125e-19,
    2.1069415749082026e-19, 2.0976698805483467e-19, 2.0884691491567363e-19, 2.0793372969963634e-19,
    2.0702723137954107e-19, 2.061272258971713e-19, 2.0523352580895635e-19, 2.0434594995315797e-19,
    2.0346432313698148e-19, 2.0258847584216418e-19, 2.0171824394771313e-19, 2.008534684685753e-19,
    1.9999399530912015e-19, 1.9913967503040585e-19, 1.9829036263028144e-19, 1.9744591733545175e-19,
    1.9660620240469857e-19, 1.9577108494251485e-19, 1.9494043572246307e-19, 1.941141290196216e-19,
    1.9329204245152935e-19, 1.9247405682708168e-19, 1.9166005600287074e-19, 1.9084992674649826e-19,
    1.900435586064234e-19, 1.8924084378793725e-19, 1.8844167703488436e-19, 1.8764595551677749e-19,
    1.868535787209745e-19, 1.8606444834960934e-19, 1.8527846822098793e-19, 1.8449554417517928e-19,
    1.8371558398354868e-19, 1.8293849726199566e-19, 1.8216419538767393e-19, 1.8139259141898448e-19,
    1.8062360001864453e-19, 1.7985713737964743e-19, 1.7909312115393845e-19, 1.78331470383642e-19,
    1.7757210543468428e-19, 1.7681494793266395e-19, 1.760599207008314e-19, 1.753069477000441e-19,
    1.7455595397057217e-19, 1.7380686557563475e-19, 1.7305960954655264e-19, 1.7231411382940904e-19,
    1.7157030723311378e-19, 1.7082811937877138e-19, 1.7008748065025788e-19, 1.6934832214591352e-19,
    1.686105756312635e-19, 1.6787417349268046e-19, 1.6713904869190636e-19, 1.6640513472135291e-19,
    1.6567236556010242e-19, 1.6494067563053266e-19, 1.6420999975549115e-19, 1.6348027311594532e-19,
    1.627514312090366e-19, 1.6202340980646725e-19, 1.6129614491314931e-19, 1.605695727260459e-19,
    1.598436295931348e-19, 1.591182519724249e-19, 1.5839337639095554e-19, 1.57668939403708e-19,
    1.569448775523589e-19, 1.562211273238026e-19, 1.554976251083707e-19, 1.547743071576727e-19,
    1.540511095419833e-19, 1.5332796810709688e-19, 1.5260481843056974e-19, 1.5188159577726683e-19,
    1.5115823505412761e-19, 1.5043467076406199e-19, 1.4971083695888395e-19, 1.4898666719118714e-19,
    1.4826209446506113e-19, 1.4753705118554365e-19, 1.468114691066983e-19, 1.4608527927820112e-19,
    1.453584119903145e-19, 1.4463079671711862e-19, 1.4390236205786415e-19, 1.4317303567630177e-19,
    1.4244274423783481e-19, 1.4171141334433217e-19, 1.4097896746642792e-19, 1.4024532987312287e-19,
    1.3951042255849034e-19, 1.3877416616527576e-19, 1.3803647990516385e-19, 1.3729728147547174e-19,
    1.3655648697200824e-19, 1.3581401079782068e-19, 1.35069765567529e-19, 1.3432366200692418e-19,
    1.3357560884748263e-19, 1.3282551271542047e-19, 1.3207327801488087e-19, 1.3131880680481524e-19,
    1.3056199866908076e-19, 1.2980275057923788e-19, 1.2904095674948608e-19, 1.2827650848312727e-19,
    1.2750929400989213e-19, 1.2673919831340482e-19, 1.2596610294799512e-19, 1.2518988584399374e-19,
    1.2441042110056523e-19, 1.2362757876504165e-19, 1.2284122459762072e-19, 1.2205121982017852e-19,
    1.2125742084782245e-19, 1.2045967900166973e-19, 1.196578402011802e-19, 1.1885174463419555e-19,
    1.180412264026409e-19, 1.1722611314162064e-19, 1.164062256093911e-19, 1.1558137724540874e-19,
    1.1475137369333185e-19, 1.1391601228549047e-19, 1.1307508148492592e-19, 1.1222836028063025e-19,
    1.1137561753107903e-19, 1.1051661125053526e-19, 1.0965108783189755e-19, 1.0877878119905372e-19,
    1.0789941188076655e-19, 1.070126859970364e-19, 1.0611829414763286e-19, 1.0521591019102928e-19,
    1.0430518990027552e-19, 1.0338576948035472e-19, 1.0245726392923699e-19, 1.015192652220931e-19,
    1.0057134029488235e-19, 9.961302879967281e-20, 9.864384059945991e-20, 9.766325296475582e-20,
    9.667070742762345e-20, 9.566560624086667e-20, 9.464730838043321e-20, 9.361512501732351e-20,
    9.256831437088728e-20, 9.150607583763877e-20, 9.042754326772572e-20, 8.933177723376368e-20,
    8.821775610232788e-20, 8.708436567489232e-20, 8.593038710961216e-20, 8.475448276424435e-20,
    8.355517950846234e-20, 8.233084893358536e-20, 8.107968372912985e-20, 7.979966928413386e-20,
    7.848854928607274e-20, 7.714378370093469e-20, 7.576249697946757e-20, 7.434141357848533e-20,
    7.287677680737843e-20, 7.136424544352537e-20, 6.979876024076107e-20, 6.817436894479905e-20,
    6.648399298619854e-20, 6.471911034516277e-20, 6.28693148131037e-20, 6.092168754828126e-20,
    5.885987357557682e-20, 5.666267511609098e-20, 5.430181363089457e-20, 5.173817174449422e-20,
    4.8915031722398545e-20, 4.57447418907553e-20, 4.2078802568583416e-20, 3.762598672240476e-20,
    3.162858980588188e-20, 0.0,
];

/// Normal kernel values at [`NORMAL_X`].
pub const NORMAL_Y: [f64; 254] = [
    1.4598410796619063e-22, 3.0066613427942797e-22, 4.612972881510347e-22, 6.266335004923436e-22,
    7.959452476188154e-22, 9.687465502170504e-22, 1.144687700237944e-21, 1.3235036304379167e-21,
    1.504985769205313e-21, 1.6889653000719298e-21, 1.8753025382711626e-21, 2.063879842369519e-21,
    2.2545966913644708e-21, 2.44736615188018e-21, 2.6421122727763533e-21, 2.8387681187879908e-21,
    3.0372742567457284e-21, 3.237577569998659e-21, 3.439630315794878e-21, 3.64338936579978e-21,
    3.848815586891231e-21, 4.0558733309492775e-21, 4.264530010428359e-21, 4.474755742230507e-21,
    4.686523046535558e-21, 4.899806590277526e-21, 5.114582967210549e-21, 5.330830508204617e-21,
    5.548529116703176e-21, 5.767660125269048e-21, 5.988206169917846e-21, 6.210151079544222e-21,
    6.433479778225721e-21, 6.65817819857139e-21, 6.884233204589318e-21, 7.11163252279571e-21,
    7.340364680490309e-21, 7.570418950288642e-21, 7.801785300137974e-21, 8.034454348157002e-21,
    8.268417321733312e-21, 8.503666020391502e-21, 8.740192782010952e-21, 8.97799045202819e-21,
    9.217052355306144e-21, 9.457372270392882e-21, 9.698944405926943e-21, 9.941763378975842e-21,
    1.0185824195119818e-20, 1.043112223011477e-20, 1.0677653212987396e-20, 1.0925413210432004e-20,
    1.1174398612392891e-20, 1.1424606118728715e-20, 1.1676032726866302e-20, 1.1928675720361027e-20,
    1.2182532658289373e-20, 1.2437601365406785e-20, 1.2693879923010674e-20, 1.2951366660454145e-20,
    1.321006014726146e-20, 1.3469959185800733e-20, 1.3731062804473644e-20, 1.3993370251385596e-20,
    1.4256880988463136e-20, 1.452159468598837e-20, 1.4787511217522902e-20, 1.505463065519617e-20,
    1.5322953265335218e-20, 1.5592479504415048e-20, 1.5863210015310328e-20, 1.6135145623830982e-20,
    1.6408287335525592e-20, 1.6682636332737932e-20, 1.6958193971903124e-20, 1.7234961781071113e-20,
    1.7512941457646084e-20, 1.7792134866331487e-20, 1.807254403727107e-20, 1.8354171164377277e-20,
    1.8637018603838945e-20, 1.8921088872801004e-20, 1.9206384648209468e-20, 1.9492908765815636e-20,
    1.9780664219333857e-20, 2.006965415974784e-20, 2.035988189476086e-20, 2.0651350888385696e-20,
    2.094406476067054e-20, 2.1238027287557466e-20, 2.1533242400870487e-20, 2.1829714188430474e-20,
    2.2127446894294597e-20, 2.242644491911827e-20, 2.2726712820637798e-20, 2.3028255314272276e-20,
    2.3331077273843558e-20, 2.3635183732413286e-20, 2.3940579883236352e-20, 2.4247271080830277e-20,
    2.455526284216033e-20, 2.4864560847940368e-20, 2.5175170944049622e-20, 2.548709914306593e-20,
    2.5800351625915997e-20, 2.6114934743643687e-20, 2.6430855019297323e-20, 2.674811914993741e-20,
    2.7066734008766247e-20, 2.7386706647381193e-20, 2.770804429815356e-20, 2.803075437673527e-20,
    2.835484448469575e-20, 2.868032241229163e-20, 2.9007196141372126e-20, 2.933547384842322e-20,
    2.966516390775399e-20, 2.9996274894828624e-20, 3.0328815589748056e-20, 3.066279498088529e-20,
    3.099822226867876e-20, 3.133510686958861e-20, 3.167345842022056e-20, 3.201328678162299e-20,
    3.235460204376261e-20, 3.2697414530184806e-20, 3.304173480286495e-20, 3.338757366725735e-20,
    3.373494217754894e-20, 3.408385164212521e-20, 3.443431362925624e-20, 3.4786339973011376e-20,
    3.5139942779411164e-20, 3.549513443282617e-20, 3.585192760263246e-20, 3.621033525013417e-20,
    3.6570370635764384e-20, 3.693204732657588e-20, 3.729537920403425e-20, 3.76603804721264e-20,
    3.8027065665798284e-20, 3.839544965973665e-20, 3.876554767751017e-20, 3.9137375301086406e-20,
    3.951094848074217e-20, 3.988628354538543e-20, 4.0263397213308566e-20, 4.064230660339354e-20,
    4.1023029246790967e-20, 4.140558309909644e-20, 4.178998655304882e-20, 4.217625845177682e-20,
    4.256441810262176e-20, 4.29544852915662e-20, 4.334648029830012e-20, 4.3740423911958146e-20,
    4.4136337447563716e-20, 4.4534242763218286e-20, 4.4934162278076256e-20, 4.5336118991149025e-20,
    4.5740136500984466e-20, 4.614623902627128e-20, 4.655445142742113e-20, 4.696479922918509e-20,
    4.737730864436494e-20, 4.779200659868417e-20, 4.820892075688811e-20, 4.8628079550147814e-20,
    4.9049512204847653e-20, 4.9473248772842596e-20, 4.9899320163277674e-20, 5.032775817606897e-20,
    5.0758595537153414e-20, 5.1191865935622696e-20, 5.162760406286606e-20, 5.2065845653856416e-20,
    5.2506627530725194e-20, 5.294998764878345e-20, 5.3395965145159426e-20, 5.3844600390237576e-20,
    5.429593504209936e-20, 5.475001210418387e-20, 5.520687598640507e-20, 5.566657256998382e-20,
    5.612914927627579e-20, 5.659465513990248e-20, 5.706314088652056e-20, 5.753465901559692e-20,
    5.800926388859122e-20, 5.848701182298758e-20, 5.89679611926598e-20, 5.945217253510347e-20,
    5.99397086661226e-20, 6.043063480261893e-20, 6.092501869420053e-20, 6.142293076440286e-20,
    6.192444426240153e-20, 6.242963542619394e-20, 6.293858365833621e-20, 6.345137171544756e-20,
    6.396808591283496e-20, 6.448881634575274e-20, 6.501365712899535e-20, 6.554270665673171e-20,
    6.607606788473072e-20, 6.66138486374042e-20, 6.715616194241298e-20, 6.770312639595058e-20,
    6.825486656224641e-20, 6.881151341132782e-20, 6.937320479965968e-20, 6.994008599895911e-20,
    7.05123102792795e-20, 7.109003955339717e-20, 7.16734450906448e-20, 7.226270830965578e-20,
    7.285802166105734e-20, 7.34595896130358e-20, 7.406762975496755e-20, 7.468237403705282e-20,
    7.530407016722667e-20, 7.593298319069855e-20, 7.656939728248375e-20, 7.721361778948768e-20,
    7.786597356641702e-20, 7.852681965945675e-20, 7.919654040385056e-20, 7.987555301703797e-20,
    8.056431178890163e-20, 8.126331299642618e-20, 8.19731007037063e-20, 8.269427365263403e-20,
    8.342749350883679e-20, 8.417349480745342e-20, 8.493309705283207e-20, 8.57072195782309e-20,
    8.64968999859307e-20, 8.730331729565533e-20, 8.81278213788595e-20, 8.897197092819667e-20,
    8.983758323931406e-20, 9.072680069786954e-20, 9.164218148406354e-20, 9.258682640670276e-20,
    9.356456148027886e-20, 9.458021001263618e-20, 9.564001555085036e-20, 9.675233477050313e-20,
    9.792885169780883e-20, 9.918690585753133e-20, 1.0055456271343397e-19, 1.0208407377305566e-19,
    1.0390360993240711e-19, 1.0842021724855044e-19,
];

pub const NORMAL_IPMF: [i64; 256] = [
    9223372036854775408, 1100243796534090797, 7866600928998383022, 6788754710675124691,
    9022865200181688296, 6522434035205502164, 4723064097360024697, 3360495653216416088,
    2289663232373870755, 1423968905551920455, 708364817827797893, 106102487305601162,
    -408333464665794443, -853239722779025206, -1242095211825521362, -1585059631105762155,
    -1889943050287169086, -2162852901990669843, -2408637386594511193, -2631196530262954448,
    -2833704942520925732, -3018774289025787439, -3188573753472222231, -3344920681707410914,
    -3489349705062150768, -3623166100042179544, -3747487436868335278, -3863276422712173808,
    -3971367044063130866, -4072485557029823980, -4167267476830916554, -4256271432240159761,
    -4339990541927306746, -4418861817133802326, -4493273980372377053, -4563574004462246636,
    -4630072609770453867, -4693048910430964891, -4752754358862894738, -4809416110052769505,
    -4863239903586985866, -4914412541515875772, -4963104028439161008, -5009469424769119174,
    -5053650458856559461, -5095776932695077750, -5135967952544929007, -5174333008451230625,
    -5210972924952654441, -5245980700100460247, -5279442247516297345, -5311437055462369316,
    -5342038772315650555, -5371315728843297107, -5399331404632512666, -5426144845448965104,
    -5451811038519422589, -5476381248265593008, -5499903320558339045, -5522421955752311307,
    -5543978956085263616, -5564613449659060480, -5584362093436146354, -5603259257517428627,
    -5621337193070986365, -5638626184974132325, -5655154691220933854, -5670949470294763073,
    -5686035697601807766, -5700437072199152453, -5714175914219812272, -5727273255295221103,
    -5739748920271997489, -5751621603810411941, -5762908939773946223, -5773627565915007849,
    -5783793183152377622, -5793420610475628449, -5802523835894661300, -5811116062947570228,
    -5819209754516120768, -5826816672854571802, -5833947916825278195, -5840613956570608249,
    -5846824665591763395, -5852589350491075357, -5857916778480726477, -5862815203334800430,
    -5867292388935742441, -5871355631762283997, -5875011781262890819, -5878267259039093710,
    -5881128076579883546, -5883599852028851382, -5885687825288565257, -5887396872144963778,
    -5888731517955042223, -5889695949247728499, -5890294025706689822, -5890529289910829504,
    -5890404977675987449, -5889924026487208528, -5889089083913555992, -5887902514965209240,
    -5886366408898372127, -5884482585690639756, -5882252601321090366, -5879677752995027766,
    -5876759083794175305, -5873497386318840733, -5869893206505510263, -5865946846617024340,
    -5861658367354159190, -5857027590486131555, -5852054100063428398, -5846737243971504641,
    -5841076134082373571, -5835069647234580384, -5828716424754549310, -5822014871949021959,
    -5814963157357531601, -5807559211080072146, -5799800723447230025, -5791685142338073347,
    -5783209670985158971, -5774371264582489329, -5765166627072226519, -5755592207057667866,
    -5745644193442049188, -5735318510777133844, -5724610813433666496, -5713516480340333005,
    -5702030608556698118, -5690148005851018661, -5677863184109371808, -5665170350903313433,
    -5652063400924580562, -5638535907000141432, -5624581109999480439, -5610191908627599865,
    -5595360848093632709, -5580080108034218849, -5564341489875550045, -5548136403221394654,
    -5531455851545399204, -5514290416593586870, -5496630242226406575, -5478465016761742826,
    -5459783954986665201, -5440575777891777017, -5420828692432397919, -5400530368638773571,
    -5379667916699401670, -5358227861294116825, -5336196115274292307, -5313557951078385986,
    -5290297970633451489, -5266400072915222391, -5241847420214015772, -5216622401043726607,
    -5190706591719533973, -5164080714589203240, -5136724594099067134, -5108617109269313037,
    -5079736143458214973, -5050058530461741430, -5019559997031891994, -4988215100963583032,
    -4955997165645492083, -4922878208652041825, -4888828866780320026, -4853818314258475851,
    -4817814175855179990, -4780782432601701861, -4742687321746719241, -4703491227581444720,
    -4663154564978699244, -4621635653358766431, -4578890580370785840, -4534873055659683516,
    -4489534251700611902, -4442822631898829564, -4394683764809104088, -4345060121983362610,
    -4293890858708922851, -4241111576153830158, -4186654061692619033, -4130446006804747670,
    -4072410698657718678, -4012466683838401105, -3950527400305017938, -3886500774061896578,
    -3820288777467837180, -3751786943594897634, -3680883832433527802, -3607460442623922090,
    -3531389562483324266, -3452535052891361699, -3370751053395887939, -3285881101633968096,
    -3197757155301365465, -3106198503156485339, -3011010550911937371, -2911983463883581047,
    -2808890647470271789, -2701487041141150061, -2589507199690603472, -2472663129329160218,
    -2350641842139870417, -2223102583770035263, -2089673683684728595, -1949948966090106873,
    -1803483646855993757, -1649789631480328207, -1488330106139747683, -1318513295725618200,
    -1139685236927327128, -951121376596854700, -752016768184775899, -541474585642866346,
    -318492605725778472, -81947227249193332, 169425512612864612, 437052607232193594,
    722551297568810077, 1027761939299714316, 1354787941622770469, 1706044619203941749,
    2084319374409574060, 2492846399593711370, 2935400169348532576, 3416413484613111455,
    3941127949860576155, 4515787798793437894, 5147892401439714413, 5846529325380405959,
    6622819682216655291, 7490522659874166085, 8466869998277892108, 8216968526387345482,
    4550693915488934669, 7628019504138977223, 6605080500908005863, 7121156327650272532,
    2484871780331574356, 7179104797032803433, 7066086283830045340, 1516500120817362978,
    216305945438803570, 6295963418525324512, 2889316805630113239, -2712587580533804137,
    6562498853538167124, 7975754821147501243, i64::MIN, i64::MIN,
];

pub const NORMAL_MAP: [u8; 256] = [
    0, 0, 239, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253,
    253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 253, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 251, 251, 251, 251, 251, 251, 251, 250, 250, 250, 250,
    250, 249, 249, 249, 248, 248, 248, 247, 247, 247, 246, 246, 245, 244, 244, 243, 242, 240, 2, 2,
    3, 3, 0, 0, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253, 1, 0, 0,
];

/// Exponential layer abscissae.
pub const EXPONENTIAL_X: [f64; 253] = [
    8.206624067534882e-19, 7.397373235160728e-19, 6.913331337791529e-19, 6.564735882096453e-19,
    6.291253995981851e-19, 6.065722412960496e-19, 5.873527610373727e-19, 5.705885052853694e-19,
    5.557094569162239e-19, 5.423243890374395e-19, 5.301529769650878e-19, 5.189873925770806e-19,
    5.086692261799833e-19, 4.990749293879647e-19, 4.901062589444954e-19, 4.816837901064919e-19,
    4.737423865364471e-19, 4.662279580719682e-19, 4.590950901778405e-19, 4.523052779065815e-19,
    4.458255881635396e-19, 4.396276312636838e-19, 4.336867596710647e-19, 4.2798143618469714e-19,
    4.224927302706489e-19, 4.172039125346411e-19, 4.1210012522465616e-19, 4.0716811225869233e-19,
    4.0239599631006903e-19, 3.9777309342877357e-19, 3.93289757853345e-19, 3.8893725129310323e-19,
    3.8470763218720385e-19, 3.8059366138180143e-19, 3.765887213854473e-19, 3.7268674692030177e-19,
    3.688821649224816e-19, 3.651698424880007e-19, 3.6154504153287473e-19, 3.5800337915318032e-19,
    3.545407928453343e-19, 3.5115350988784242e-19, 3.478380203003096e-19, 3.4459105288907336e-19,
    3.4140955396563316e-19, 3.3829066838741162e-19, 3.3523172262289e-19, 3.3223020958685874e-19,
    3.292837750280447e-19, 3.263902052820205e-19, 3.2354741622810815e-19, 3.207534433108079e-19,
    3.180064325047861e-19, 3.1530463211820845e-19, 3.1264638534265134e-19, 3.100301234693421e-19,
    3.07454359701373e-19, 3.049176835000556e-19, 3.0241875541094565e-19, 2.999563023214455e-19,
    2.975291131074259e-19, 2.9513603463113224e-19, 2.9277596805684267e-19, 2.9044786545442563e-19,
    2.8815072666416712e-19, 2.858835963990693e-19, 2.8364556156331615e-19, 2.81435748767798e-19,
    2.7925332202553125e-19, 2.770974806115288e-19, 2.7496745707320232e-19, 2.7286251537873397e-19,
    2.7078194919206054e-19, 2.687250802641905e-19, 2.666912569315344e-19, 2.646798527127889e-19,
    2.6269026499668434e-19, 2.6072191381359757e-19, 2.5877424068465143e-19, 2.568467075424817e-19,
    2.549387957183548e-19, 2.530500049907748e-19, 2.511798526911271e-19, 2.4932787286227806e-19,
    2.474936154663866e-19, 2.456766456384867e-19, 2.438765429826784e-19, 2.4209290090801527e-19,
    2.403253260014054e-19, 2.3857343743505147e-19, 2.368368664061465e-19, 2.3511525560671253e-19,
    2.3340825872163284e-19, 2.3171553995306794e-19, 2.3003677356958333e-19, 2.283716434784348e-19,
    2.2671984281957174e-19, 2.250810735800194e-19, 2.234550462273959e-19, 2.2184147936140775e-19,
    2.2024009938224424e-19, 2.186506401748684e-19, 2.1707284280826716e-19, 2.1550645524878675e-19,
    2.1395123208673778e-19, 2.124069342755064e-19, 2.1087332888245875e-19, 2.0935018885097035e-19,
    2.0783729277295508e-19, 2.0633442467130712e-19, 2.0484137379170616e-19, 2.0335793440326865e-19,
    2.018839056075609e-19, 2.0041909115551697e-19, 1.9896329927183254e-19, 1.975163424864309e-19,
    1.9607803747261946e-19, 1.9464820489157862e-19, 1.9322666924284314e-19, 1.9181325872045647e-19,
    1.904078050744948e-19, 1.8901014347767504e-19, 1.8762011239677479e-19, 1.8623755346860768e-19,
    1.8486231138030984e-19, 1.8349423375370566e-19, 1.8213317103353295e-19, 1.8077897637931708e-19,
    1.7943150556069476e-19, 1.7809061685599652e-19, 1.7675617095390567e-19, 1.7542803085801941e-19,
    1.741060617941453e-19, 1.727901311201724e-19, 1.7148010823836362e-19, 1.7017586450992059e-19,
    1.6887727317167824e-19, 1.6758420925479093e-19, 1.6629654950527621e-19, 1.650141723062866e-19,
    1.6373695760198277e-19, 1.624647868228856e-19, 1.6119754281258616e-19, 1.5993510975569615e-19,
    1.586773731069231e-19, 1.5742421952115544e-19, 1.5617553678444595e-19, 1.5493121374578016e-19,
    1.5369114024951992e-19, 1.524552070684102e-19, 1.5122330583703858e-19, 1.499953289856356e-19,
    1.4877116967410352e-19, 1.4755072172615974e-19, 1.4633387956347966e-19, 1.4512053813972103e-19,
    1.439105928743099e-19, 1.4270393958586506e-19, 1.415004744251338e-19, 1.4030009380730888e-19,
    1.3910269434359025e-19, 1.3790817277185197e-19, 1.3671642588626657e-19, 1.3552735046573446e-19,
    1.3434084320095729e-19, 1.3315680061998685e-19, 1.3197511901207148e-19, 1.3079569434961214e-19,
    1.2961842220802957e-19, 1.28443197683331e-19, 1.2726991530715219e-19, 1.2609846895903523e-19,
    1.2492875177568625e-19, 1.237606560569394e-19, 1.225940731681333e-19, 1.2142889343858445e-19,
    1.2026500605581765e-19, 1.1910229895518744e-19, 1.1794065870449425e-19, 1.1677997038316715e-19,
    1.1562011745554883e-19, 1.144609816377787e-19, 1.1330244275772562e-19, 1.1214437860737343e-19,
    1.109866647870073e-19, 1.0982917454048923e-19, 1.086717785808435e-19, 1.0751434490529747e-19,
    1.0635673859884002e-19, 1.0519882162526621e-19, 1.0404045260457141e-19, 1.0288148657544097e-19,
    1.0172177474144965e-19, 1.0056116419943559e-19, 9.939949764834668e-20, 9.823661307666745e-20,
    9.70723434263201e-20, 9.590651623069063e-20, 9.47389532241542e-20, 9.356946992015904e-20,
    9.239787515456947e-20, 9.122397059055647e-20, 9.004755018085287e-20, 8.886839958264763e-20,
    8.768629551976745e-20, 8.650100508607102e-20, 8.531228498314119e-20, 8.411988068438521e-20,
    8.292352551651342e-20, 8.17229396480345e-20, 8.051782897283921e-20, 7.930788387509923e-20,
    7.809277785952443e-20, 7.687216602842904e-20, 7.564568338396512e-20, 7.441294293017913e-20,
    7.317353354509333e-20, 7.192701758763107e-20, 7.067292819766679e-20, 6.941076623950036e-20,
    6.813999682925642e-20, 6.686004537461023e-20, 6.557029304021008e-20, 6.427007153336853e-20,
    6.295865708092356e-20, 6.163526343814314e-20, 6.02990337321517e-20, 5.894903089285018e-20,
    5.758422635988593e-20, 5.62034866695974e-20, 5.480555741349931e-20, 5.3389043909003295e-20,
    5.1952387717989917e-20, 5.0493837866338355e-20, 4.901141522262949e-20, 4.7502867933366117e-20,
    4.5965615001265455e-20, 4.4396673897997565e-20, 4.279256630214859e-20, 4.1149193273430015e-20,
    3.9461666762606287e-20, 3.7724077131401685e-20, 3.592916408620436e-20, 3.4067836691100565e-20,
    3.2128447641564046e-20, 3.0095646916399994e-20, 2.794846945559833e-20, 2.5656913048718645e-20,
    2.317520975680391e-20, 2.042669522825129e-20, 1.7261770330213488e-20, 1.3281889259442579e-20,
    0.0,
];

/// Exponential kernel values at [`EXPONENTIAL_X`].
pub const EXPONENTIAL_Y: [f64; 253] = [
    5.595205495112736e-23, 1.1802509982703313e-22, 1.844442338673583e-22, 2.543903046669831e-22,
    3.2737694311509334e-22, 4.0307732132706715e-22, 4.812547831949511e-22, 5.617291489658331e-22,
    6.443582054044353e-22, 7.290266234346368e-22, 8.156388845632194e-22, 9.041145368348222e-22,
    9.94384884863992e-22, 1.0863906045969114e-21, 1.1800799775461269e-21, 1.2754075534831208e-21,
    1.372333117637729e-21, 1.4708208794375214e-21, 1.5708388257440445e-21, 1.6723581984374566e-21,
    1.7753530675030514e-21, 1.8797999785104595e-21, 1.9856776587832504e-21, 2.0929667704053244e-21,
    2.201649700995824e-21, 2.311710385230618e-21, 2.4231341516125464e-21, 2.535907590142089e-21,
    2.650018437417054e-21, 2.765455476366039e-21, 2.8822084483468604e-21, 3.000267975754771e-21,
    3.1196254936130377e-21, 3.240273188880175e-21, 3.3622039464187092e-21, 3.485411300740904e-21,
    3.6098893927859475e-21, 3.735632931097177e-21, 3.862637156862005e-21, 3.990897812355284e-21,
    4.120411112391895e-21, 4.251173718448891e-21, 4.383182715163374e-21, 4.5164355889510656e-21,
    4.6509302085234806e-21, 4.7866648071096e-21, 4.923637966211997e-21, 5.061848600747899e-21,
    5.201295945443473e-21, 5.341979542364895e-21, 5.483899229483096e-21, 5.627055130180635e-21,
    5.7714476436191935e-21, 5.917077435895068e-21, 6.063945431917703e-21, 6.212052807953168e-21,
    6.3614009847804375e-21, 6.511991621413643e-21, 6.6638266093481696e-21, 6.816908067292628e-21,
    6.971238336352438e-21, 7.126819975634082e-21, 7.283655758242034e-21, 7.441748667643017e-21,
    7.601101894374635e-21, 7.761718833077541e-21, 7.923603079832257e-21, 8.086758429783484e-21,
    8.251188875036333e-21, 8.416898602810326e-21, 8.58389199383831e-21, 8.752173620998646e-21,
    8.921748248170071e-21, 9.09262082929965e-21, 9.264796507675128e-21, 9.438280615393829e-21,
    9.613078673021033e-21, 9.789196389431416e-21, 9.966639661827884e-21, 1.0145414575932636e-20,
    1.0325527406345955e-20, 1.0506984617068672e-20, 1.0689792862184811e-20, 1.0873958986701341e-20,
    1.10594900275424e-20, 1.1246393214695825e-20, 1.1434675972510121e-20, 1.1624345921140471e-20,
    1.181541087814266e-20, 1.2007878860214202e-20, 1.2201758085082226e-20, 1.239705697353804e-20,
    1.2593784151618565e-20, 1.2791948452935152e-20, 1.29915589211506e-20, 1.3192624812605428e-20,
    1.3395155599094805e-20, 1.3599160970797774e-20, 1.3804650839360727e-20, 1.4011635341137284e-20,
    1.4220124840587164e-20, 1.4430129933836705e-20, 1.46416614524042e-20, 1.485473046709328e-20,
    1.5069348292058084e-20, 1.5285526489044053e-20, 1.5503276871808626e-20, 1.5722611510726402e-20,
    1.5943542737583543e-20, 1.6166083150566702e-20, 1.6390245619451956e-20, 1.6616043290999594e-20,
    1.684348959456108e-20, 1.7072598247904713e-20, 1.7303383263267072e-20, 1.7535858953637607e-20,
    1.777003993928424e-20, 1.8005941154528286e-20, 1.8243577854777398e-20, 1.8482965623825808e-20,
    1.8724120381431627e-20, 1.8967058391181452e-20, 1.9211796268653192e-20, 1.9458350989888484e-20,
    1.9706739900186868e-20, 1.9956980723234356e-20, 2.0209091570579904e-20, 2.0463090951473895e-20,
    2.0718997783083593e-20, 2.097683140110135e-20, 2.123661157076213e-20, 2.1498358498287976e-20,
    2.1762092842777868e-20, 2.2027835728562592e-20, 2.229560875804522e-20, 2.256543402504904e-20,
    2.2837334128696004e-20, 2.311133218784001e-20, 2.3387451856080863e-20, 2.366571733738611e-20,
    2.394615340234961e-20, 2.422878540511741e-20, 2.451363930101321e-20, 2.4800741664897764e-20,
    2.5090119710298442e-20, 2.5381801309347597e-20, 2.56758150135705e-20, 2.5972190075566336e-20,
    2.6270956471628253e-20, 2.6572144925351523e-20, 2.687578693228184e-20, 2.718191478565915e-20,
    2.7490561603315974e-20, 2.7801761355793055e-20, 2.811554889573917e-20, 2.8431959988666534e-20,
    2.8751031345137833e-20, 2.907280065446631e-20, 2.9397306620015486e-20, 2.9724588996191657e-20,
    3.005468862722811e-20, 3.038764748786764e-20, 3.072350872605708e-20, 3.1062316707775905e-20,
    3.140411706412999e-20, 3.174895674085097e-20, 3.2096884050352357e-20, 3.2447948726504914e-20,
    3.280220198230601e-20, 3.315969657063137e-20, 3.352048684827223e-20, 3.388462884347689e-20,
    3.4252180327233346e-20, 3.4623200888548644e-20, 3.4997752014001677e-20, 3.537589717186906e-20,
    3.5757701901149035e-20, 3.61432339058358e-20, 3.65325631548274e-20, 3.692576198788357e-20,
    3.732290522808698e-20, 3.7724070301302117e-20, 3.812933736317104e-20, 3.8538789434235234e-20,
    3.895251254382786e-20, 3.93705958834424e-20, 3.979313197035144e-20, 4.022021682232577e-20,
    4.0651950144388133e-20, 4.1088435528630944e-20, 4.152978066823271e-20, 4.197609758692658e-20,
    4.242750288530745e-20, 4.2884118005513604e-20, 4.334606951598745e-20, 4.381348941821026e-20,
    4.428651547752084e-20, 4.476529158037235e-20, 4.5249968120658306e-20, 4.574070241805442e-20,
    4.6237659171683015e-20, 4.674101095281837e-20, 4.7250938740823415e-20, 4.776763250705122e-20,
    4.8291291852069895e-20, 4.8822126702292804e-20, 4.936035807293385e-20, 4.990621890518202e-20,
    5.045995498662554e-20, 5.1021825965285324e-20, 5.159210646917826e-20, 5.2171087345169234e-20,
    5.2759077033045284e-20, 5.335640309332586e-20, 5.396341391039951e-20, 5.458048059625925e-20,
    5.520799912453558e-20, 5.584639272987383e-20, 5.649611461419377e-20, 5.715765100929071e-20,
    5.783152465495663e-20, 5.851829876379432e-20, 5.921858155879171e-20, 5.99330314883387e-20,
    6.066236324679689e-20, 6.1407354758435e-20, 6.216885532049976e-20, 6.294779515010373e-20,
    6.37451966432144e-20, 6.456218773753799e-20, 6.54000178818891e-20, 6.626007726330934e-20,
    6.714392014514662e-20, 6.80532934473017e-20, 6.8990172088133e-20, 6.99568031585645e-20,
    7.095576179487843e-20, 7.199002278894508e-20, 7.306305373910546e-20, 7.417893826626688e-20,
    7.534254213417312e-20, 7.655974217114297e-20, 7.783774986341285e-20, 7.918558267402951e-20,
    8.06147755373533e-20, 8.214050276981807e-20, 8.378344597828052e-20, 8.557312924967816e-20,
    8.75544596695901e-20, 8.980238805770688e-20, 9.246247142115109e-20, 9.591964134495172e-20,
    1.0842021724855044e-19,
];

pub const EXPONENTIAL_IPMF: [i64; 256] = [
    9223372036854773904, 1623796909450835018, 2664290944894291308, 7387971354164061021,
    6515064486552723158, 8840508362680718891, 6099647593382936415, 7673130333659513775,
    6220332867583438096, 5045979640552813698, 4075305837223955523, 3258413672162525427,
    2560664887087762532, 1957224924672899637, 1429800935350577509, 964606309710808246,
    551043923599587126, 180827629096890295, -152619738120023625, -454588624410291545,
    -729385126147774968, -980551509819446936, -1211029700667463960, -1423284293868548440,
    -1619396356369050407, -1801135830956211623, -1970018048575618087, -2127348289059705319,
    -2274257249303686407, -2411729520096655303, -2540626634159180934, -2661705860113406470,
    -2775635634532450566, -2883008316030465190, -2984350790383654790, -3080133339198116454,
    -3170777096303091110, -3256660348483819078, -3338123885075136262, -3415475560473299110,
    -3488994201966428229, -3558932970354473157, -3625522261068041093, -3688972217741989381,
    -3749474917563782629, -3807206277531056133, -3862327722496843557, -3914987649156779685,
    -3965322714631865221, -4013458973776895589, -4059512885612783333, -4103592206186241029,
    -4145796782586128069, -4186219260694346949, -4224945717447275173, -4262056226866285509,
    -4297625367836519557, -4331722680528537317, -4364413077437472517, -4395757214229401700,
    -4425811824915135780, -4454630025296932548, -4482261588141290436, -4508753193105288068,
    -4534148654077808964, -4558489126279958148, -4581813295192216580, -4604157549138257636,
    -4625556137145255269, -4646041313519104421, -4665643470413305925, -4684391259530326597,
    -4702311703971761733, -4719430301145103269, -4735771117539946308, -4751356876102087236,
    -4766209036859134052, -4780347871386013380, -4793792531638892068, -4806561113635132708,
    -4818670716409306532, -4830137496634465604, -4840976719260837892, -4851202804490348868,
    -4860829371376459908, -4869869278311657508, -4878334660640770948, -4886236965617427236,
    -4893586984900802596, -4900394884772702724, -4906670234238885316, -4912422031164496804,
    -4917658726580119812, -4922388247283532292, -4926618016851066692, -4930354975163335236,
    -4933605596540651332, -4936375906575303844, -4938671497741365892, -4940497543854575684,
    -4941858813449629540, -4942759682136115044, -4943204143989086820, -4943195822025527940,
    -4942737977813206404, -4941833520255033284, -4940485013586738820, -4938694684624359428,
    -4936464429291795972, -4933795818458825604, -4930690103114057988, -4927148218896864068,
    -4923170790008275908, -4918758132519213508, -4913910257091645764, -4908626871126539204,
    -4902907380349534020, -4896750889844272900, -4890156204540531076, -4883121829162554372,
    -4875645967641781188, -4867726521994927044, -4859361090668103364, -4850546966345113668,
    -4841281133215539076, -4831560263698491972, -4821380714613447492, -4810738522790066116,
    -4799629400105481988, -4788048727936307268, -4775991551010515012, -4763452570642114308,
    -4750426137329494532, -4736906242696389124, -4722886510751377669, -4708360188440088965,
    -4693320135461420933, -4677758813316108101, -4661668273553489093, -4645040145179241541,
    -4627865621182772101, -4610135444140930052, -4591839890849345476, -4572968755929961540,
    -4553511334358205764, -4533456402849101572, -4512792200036278980, -4491506405372580932,
    -4469586116675402436, -4447017826233108036, -4423787395382284804, -4399880027458416324,
    -4375280239014115077, -4349971829190472197, -4323937847117721861, -4297160557210933573,
    -4269621402214949829, -4241300963840749253, -4212178920821861701, -4182234004204451589,
    -4151443949668877253, -4119785446662287621, -4087234084103201605, -4053764292396156933,
    -4019349281473081925, -3983960974549692677, -3947569937258423301, -3910145301787345669,
    -3871654685619032069, -3832064104425388805, -3791337878631544901, -3749438533114327493,
    -3706326689447984389, -3661960950051848261, -3616297773528534789, -3569291340409189253,
    -3520893408440946053, -3471053156460654341, -3419717015797782598, -3366828488034805510,
    -3312327947826460358, -3256152429334010374, -3198235394669719110, -3138506482563172742,
    -3076891235255162822, -3013310801389730758, -2947681612411374854, -2879915029671670790,
    -2809916959107513734, -2737587429961866118, -2662820133571325574, -2585501917733379974,
    -2505512231579385223, -2422722515205211655, -2336995527534088455, -2248184604988727559,
    -2156132842510764935, -2060672187261025415, -1961622433929371911, -1858790108950105479,
    -1751967229002895623, -1640929916937142791, -1525436855617582472, -1405227557075253256,
    -1280020420662649992, -1149510549536596104, -1013367289578704904, -871231448632104200,
    -722712146453667848, -567383236774435977, -404779231966938249, -234390647591545737,
    -55658667960119305, 132030985907841399, 329355128892811767, 537061298001085174,
    755977262693564150, 987022116608033270, 1231219266829431286, 1489711711346518517,
    1763780090187553909, 2054864117341795061, 2364588157623768948, 2694791916990503284,
    3047567482883476212, 3425304305830816371, 3830744187097297907, 4267048975685830386,
    4737884547990017266, 5247525842198998257, 5800989391535355377, 6404202162993295344,
    7064218894258540527, 7789505049452331503, 8590309807749444846, 7643763810684490059,
    8891950541491446071, 5457384281016205975, 9083704440929283969, 7976211653914433372,
    8178631350487117494, 2821287825726744835, 6322989683301709657, 4309503753387611426,
    4685170734960170474, 8404845967535199663, 7330522972447554153, 1960945799076992020,
    4742910674644898996, -751799822533509968, 7023456603741959948, 3843116882594676172,
    3927231442413902976, i64::MIN, i64::MIN, i64::MIN,
];

pub const EXPONENTIAL_MAP: [u8; 256] = [
    0, 0, 1, 235, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252,
    252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 252, 251, 251, 251,
    251, 251, 251, 251, 251, 251, 251, 251, 251, 251, 250, 250, 250, 250, 250, 250, 250, 249, 249,
    249, 249, 249, 249, 248, 248, 248, 248, 247, 247, 247, 247, 246, 246, 246, 245, 245, 244, 244,
    243, 243, 242, 241, 241, 240, 239, 237, 3, 3, 4, 4, 6, 0, 0, 0, 0, 236, 237, 238, 239, 240, 241,
    242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 2, 0, 0, 0,
];
